use super::schema::library;
use crate::model;
use async_graphql::{ComplexObject, Context, SimpleObject};

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, or null if no author has that id
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        Ok(library(ctx)?.author(self.author_id).map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents an author of a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in insertion order
    async fn books(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = library(ctx)?.books_by_author(self.id);
        Ok(Some(nullable_list(books)))
    }
}

/// Converts records into the nullable-element list shape of `[Book]` / `[Author]`.
pub(super) fn nullable_list<M, T: From<M>>(records: Vec<M>) -> Vec<Option<T>> {
    records.into_iter().map(|r| Some(r.into())).collect()
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::store::Library;

use super::types::{Author, Book, nullable_list};

pub type BookshelfSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn library<'ctx>(ctx: &Context<'ctx>) -> async_graphql::Result<&'ctx Arc<Library>> {
    ctx.data::<Arc<Library>>()
}

pub struct Query;

/// Root Query
#[Object]
impl Query {
    /// A Single Book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Book>> {
        let library = library(ctx)?;
        Ok(id.and_then(|id| library.book(id)).map(Into::into))
    }

    /// List of All Books
    async fn books(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        Ok(Some(nullable_list(library(ctx)?.books())))
    }

    /// A Single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(id.and_then(|id| library.author(id)).map(Into::into))
    }

    /// List of All Authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        Ok(Some(nullable_list(library(ctx)?.authors())))
    }
}

pub struct Mutation;

/// Root Mutation
#[Object]
impl Mutation {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let book = library(ctx)?.add_book(name, author_id)?;
        Ok(Some(book.into()))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?.add_author(name)?;
        Ok(Some(author.into()))
    }
}

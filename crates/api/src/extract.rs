//! Normalizing JSON body extractors for axum handlers.
//!
//! - [`Normalized`] -- decodes `Json<T>`, then applies `T`'s own declaration.
//! - [`NormalizedWith`] -- same, but the handler parameter declares the rule
//!   set, overriding whatever `T` declares.
//!
//! Both run after the JSON decoder and before the handler body, and hand the
//! handler the same decoded value with its string fields rewritten.

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tidy_core::{CallSite, InboundAdapter, Normalizable, RulePreset, Rules};

use crate::error::AppError;

/// JSON body normalized with its type-level declaration.
///
/// A type without a declaration passes through untouched.
///
/// ```ignore
/// async fn create_user(Normalized(input): Normalized<CreateUser>) -> AppResult<impl IntoResponse> {
///     tracing::info!(name = %input.name, "creating user");
///     Ok(StatusCode::CREATED)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalized<T>(pub T);

impl<T, S> FromRequest<S> for Normalized<T>
where
    T: DeserializeOwned + Normalizable,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await?;
        let body = InboundAdapter::after_read(body, &CallSite::bare())?;
        Ok(Self(body))
    }
}

impl<T> Deref for Normalized<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Normalized<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

/// JSON body normalized with the call-site preset `P`.
///
/// Useful when `T` comes from another crate and cannot carry a declaration,
/// or when one endpoint needs different rules than the type declares.
///
/// ```ignore
/// async fn search(
///     NormalizedWith(query, _): NormalizedWith<SearchQuery, Rules<true, true, true>>,
/// ) -> AppResult<impl IntoResponse> { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedWith<T, P: RulePreset = Rules>(pub T, pub PhantomData<P>);

impl<T, P: RulePreset> NormalizedWith<T, P> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, P, S> FromRequest<S> for NormalizedWith<T, P>
where
    T: DeserializeOwned + Normalizable,
    P: RulePreset,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await?;
        let body = InboundAdapter::after_read(body, &CallSite::with_preset::<P>())?;
        Ok(Self(body, PhantomData))
    }
}

impl<T, P: RulePreset> Deref for NormalizedWith<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

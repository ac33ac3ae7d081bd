use std::fmt;
use std::marker::PhantomData;

use errmap_core::{DomainError, ErrorRecord, HttpError, HttpStatusError};

use crate::Exception;

/// A unit of conversion knowledge
///
/// `convert` is only called by the dispatcher after `matches` returned
/// true for the same exception, and must not fail for anything it
/// claims.
pub trait ErrorHandler: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Whether this handler claims the exception
    fn matches(&self, exception: &Exception) -> bool;

    /// Turn a claimed exception into a record
    fn convert(&self, exception: &Exception) -> ErrorRecord;
}

/// Claims exceptions whose concrete type is `E` and projects them
/// through [`HttpError`]
pub struct HttpErrorHandler<E> {
    name: &'static str,
    _marker: PhantomData<fn() -> E>,
}

/// Default handler for domain errors
pub type BaseErrorHandler = HttpErrorHandler<DomainError>;

/// Handler for transport-level status errors
pub type StatusErrorHandler = HttpErrorHandler<HttpStatusError>;

impl<E> HttpErrorHandler<E>
where
    E: HttpError + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            name: std::any::type_name::<E>(),
            _marker: PhantomData,
        }
    }
}

impl<E> Default for HttpErrorHandler<E>
where
    E: HttpError + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HttpErrorHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpErrorHandler").field("name", &self.name).finish()
    }
}

impl<E> ErrorHandler for HttpErrorHandler<E>
where
    E: HttpError + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, exception: &Exception) -> bool {
        exception.is::<E>()
    }

    fn convert(&self, exception: &Exception) -> ErrorRecord {
        exception.downcast_ref::<E>().map_or_else(
            || ErrorRecord::fallback(exception.to_string()),
            ErrorRecord::from_http_error,
        )
    }
}

type Predicate = Box<dyn Fn(&Exception) -> bool + Send + Sync>;
type Converter = Box<dyn Fn(&Exception) -> ErrorRecord + Send + Sync>;

/// Handler assembled from a predicate and a conversion closure
pub struct FnHandler {
    name: String,
    predicate: Predicate,
    converter: Converter,
}

impl FnHandler {
    pub fn new<P, C>(name: impl Into<String>, predicate: P, converter: C) -> Self
    where
        P: Fn(&Exception) -> bool + Send + Sync + 'static,
        C: Fn(&Exception) -> ErrorRecord + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            converter: Box::new(converter),
        }
    }

    /// Claim exceptions of concrete type `E` and convert them with `convert`
    ///
    /// Use this for third-party errors that do not implement
    /// [`HttpError`].
    pub fn for_type<E, C>(name: impl Into<String>, convert: C) -> Self
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
        C: Fn(&E) -> ErrorRecord + Send + Sync + 'static,
    {
        Self::new(
            name,
            |exception| exception.is::<E>(),
            move |exception| {
                exception
                    .downcast_ref::<E>()
                    .map_or_else(|| ErrorRecord::fallback(exception.to_string()), &convert)
            },
        )
    }
}

impl fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").field("name", &self.name).finish_non_exhaustive()
    }
}

impl ErrorHandler for FnHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, exception: &Exception) -> bool {
        (self.predicate)(exception)
    }

    fn convert(&self, exception: &Exception) -> ErrorRecord {
        (self.converter)(exception)
    }
}

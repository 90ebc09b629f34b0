//! Movie form controller and catalog gateway for marquee.
//!
//! A [`MovieForm`] holds the editable state of one movie, validates it as it
//! changes, and saves it through a [`MovieGateway`]. [`RestGateway`] is the
//! HTTP implementation that talks to the catalog service.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod navigation;
pub mod page;

pub use config::Config;
pub use error::{FormError, FormResult, GatewayError, GatewayResult};
pub use form::{FieldStatus, FormMode, MovieForm, SubmitOutcome};
pub use gateway::{MovieGateway, RestGateway};
pub use navigation::{LogNotifier, Navigator, Notifier, Route};
pub use page::open_movie_page;

use thiserror::Error;

use crate::{
    config::LoadError,
    infra::{error::InfraError, fixtures::FixtureError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

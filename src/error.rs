use crate::entities::Id;
use thiserror::Error;

/// Errors raised when narrowing an [entity](crate::entities::Entity) to one of its
/// [components](crate::components::Component).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcsError {
	#[error("entity {0} is not part of this world")]
	UnknownEntity(Id),
	#[error("entity {entity} has no component of type `{component}`")]
	MissingComponent { entity: Id, component: &'static str },
}

pub type Result<T> = std::result::Result<T, EcsError>;

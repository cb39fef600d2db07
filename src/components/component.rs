use crate::components::ComponentId;

/// A piece of data that can be attached to an [entity](crate::entities::EntityData).
///
/// Implemented by #\[derive([`Component`])], which assigns the type a process-wide [ComponentId]
/// the first time it is requested.
pub trait Component: 'static {
	fn component_id() -> ComponentId;
}

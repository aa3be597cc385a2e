//! Article content, one component per [`companion_core::Section`].

mod architecture;
mod components;
mod getting_started;
mod state;

pub use architecture::{DependencyInjection, ErrorHandling, Facade, LazyLoading};
pub use components::{ChangeDetection, ContentProjection, SmartPresentational};
pub use getting_started::{Overview, ProjectStructure};
pub use state::{ServiceState, Signals, StorePattern};

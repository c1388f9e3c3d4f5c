// Application layer - Use case interactors

pub mod container;
pub mod cut_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use cut_interactor::CutInteractor;

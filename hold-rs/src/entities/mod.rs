mod cargo_item;
mod instance;
mod loaded_portion;
mod loading_step;
mod sequence;

#[doc(inline)]
pub use cargo_item::CargoDisplay;

#[doc(inline)]
pub use cargo_item::CargoItem;

#[doc(inline)]
pub use cargo_item::InvalidCargo;

#[doc(inline)]
pub use instance::LoadingInstance;

#[doc(inline)]
pub use loaded_portion::LoadedPortion;

#[doc(inline)]
pub use loading_step::LoadingStep;

#[doc(inline)]
pub use loading_step::Narration;

#[doc(inline)]
pub use sequence::StepSequence;

#![cfg_attr(not(test), no_std)]

pub mod gpio;
pub mod pac;
pub mod prelude;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

mod private {
    /// Super trait used to mark traits with an exhaustive set of
    /// implementations
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

mod account;
pub use account::AccountPopups;

mod alert;
pub use alert::AlertBanner;

mod modal;
pub use modal::ModalOverlay;

pub mod tip_form;

pub use tip_form::TipFormModel;

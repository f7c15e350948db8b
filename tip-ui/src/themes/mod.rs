mod tipper_theme;

pub use tipper_theme::apply_tipper_theme;

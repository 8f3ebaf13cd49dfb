pub mod design_form;
pub mod generate;

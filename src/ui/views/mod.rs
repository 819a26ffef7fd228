pub mod certificate;
pub mod markscheme;
pub mod quiz;
pub mod sections;

pub mod skin;
pub mod skinpack;

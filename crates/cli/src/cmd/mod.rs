pub mod doctor;
pub mod new;
pub mod tuesday;

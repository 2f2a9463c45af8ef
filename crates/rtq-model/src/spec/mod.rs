mod batch;
pub use batch::BatchSpec;

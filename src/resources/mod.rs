//! Resource methods: one public operation per API call.

mod guides;

pub use guides::GuideResource;

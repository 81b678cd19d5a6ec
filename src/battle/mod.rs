pub mod animation;
pub mod data;
pub mod engine;
pub mod handshake;

#[cfg(test)]
pub(crate) mod tests;

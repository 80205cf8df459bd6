pub mod fetch;
pub mod image;

#[cfg(test)]
pub(crate) mod test_server;

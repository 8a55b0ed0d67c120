pub mod constants;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod in_memory_store;
#[cfg(test)]
pub mod test_helpers;

/// Rule preview domain - rule records, hit payloads and the pure
/// filter/sort/validate/project services that operate on them.
pub mod domain;
pub mod services;

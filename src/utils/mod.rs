mod route_id;

pub use route_id::{route_identifier, route_name_identifier};

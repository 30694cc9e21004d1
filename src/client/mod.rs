mod department;
mod record;
mod status;

pub use department::{canonical_code, department_label, DEPARTMENTS, PURPOSES};
pub use record::{find_by_prefix, ClientRecord};
pub use status::ClientStatus;

//! Record Trait
//!
//! Every listable entity is identified by a backend-assigned integer id.

pub trait Record: Clone + 'static {
    fn id(&self) -> i64;
}

mod collection;
mod coordinates;
mod feature;
mod point;
mod properties;
mod record;
mod value;

pub use collection::*;
pub use coordinates::*;
pub use feature::*;
pub use point::*;
pub use properties::*;
pub use record::*;
pub use value::*;

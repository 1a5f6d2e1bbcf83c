//! Rendering touches colors, inline markup, style chains, and syntax
//! highlighting — splitting each concern into its own module keeps any one
//! formatting file small.

mod color;
pub mod highlight;
pub mod markup;
pub mod style;

pub use color::{Color, colorize};
pub use highlight::Theme;
pub use markup::{Resolver, StripResolver, StyledResolver, Tag, substitute};
pub use style::{Style, StyleTable};

//! Card attributes.
//!
//! Every card has five orthogonal attributes, each drawn from a
//! three-value domain. Which of the five the validator checks is
//! configured per run via the active attribute list.
//!
//! | Attribute    | Values                        |
//! |--------------|-------------------------------|
//! | `Shape`      | diamond, oval, squiggle       |
//! | `Color`      | red, green, purple            |
//! | `Number`     | one, two, three               |
//! | `Shading`    | solid, striped, open          |
//! | `Background` | light, dark, patterned        |

use serde::{Deserialize, Serialize};

/// One of the five card attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Shape,
    Color,
    Number,
    Shading,
    Background,
}

impl Attribute {
    /// All five attributes in canonical order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Shape,
        Attribute::Color,
        Attribute::Number,
        Attribute::Shading,
        Attribute::Background,
    ];

    /// Lowercase name, as used in config files and notification text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Number => "number",
            Attribute::Shading => "shading",
            Attribute::Background => "background",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Defines a three-valued attribute enum with index conversions.
macro_rules! three_valued {
    ($(#[$meta:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $a,
            $b,
            $c,
        }

        impl $name {
            /// All three values in index order.
            pub const ALL: [$name; 3] = [$name::$a, $name::$b, $name::$c];

            /// Index in `0..3`.
            #[must_use]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Value for an index; wraps modulo 3.
            #[must_use]
            pub const fn from_index(index: u8) -> Self {
                Self::ALL[(index % 3) as usize]
            }
        }
    };
}

three_valued!(
    /// Symbol drawn on the card.
    Shape { Diamond, Oval, Squiggle }
);

three_valued!(
    /// Ink color.
    Color { Red, Green, Purple }
);

three_valued!(
    /// How many symbols the card shows.
    Number { One, Two, Three }
);

three_valued!(
    /// Fill style of the symbols.
    Shading { Solid, Striped, Open }
);

three_valued!(
    /// Card background.
    Background { Light, Dark, Patterned }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_index(shape.index()), shape);
        }
        assert_eq!(Color::from_index(4), Color::Green);
    }

    #[test]
    fn test_attribute_names() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["shape", "color", "number", "shading", "background"]);
    }

    #[test]
    fn test_attribute_serde_uses_names() {
        let json = serde_json::to_string(&Attribute::Shading).unwrap();
        assert_eq!(json, "\"shading\"");
        let parsed: Attribute = serde_json::from_str("\"background\"").unwrap();
        assert_eq!(parsed, Attribute::Background);
    }
}

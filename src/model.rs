//! Core data types for Touch Sparks: contacts, spark keys, display modes
//! and the computed visual style a spark carries.

use std::fmt;

/// Position of one point of contact, in surface (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactPoint {
    pub x: f64,
    pub y: f64,
}

/// Identifier of one active touch.
///
/// Every id is a `t`-prefixed decimal token (`t0`, `t12`, `t-3`, ...). The
/// prefix is what keeps [`SparkKey::for_pair`] collision-free: an id contains
/// exactly one `t`, so the concatenation of two ids always splits back into
/// the same unordered pair.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Id for a platform touch point, from `Touch.identifier`.
    pub fn from_touch(identifier: i32) -> Self {
        Self(format!("t{identifier}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of the spark joining two contacts. Order-independent: the two ids are
/// concatenated in descending lexical order, so either endpoint may come
/// first at the call site.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct SparkKey(String);

impl SparkKey {
    pub fn for_pair(one: &ContactId, other: &ContactId) -> Self {
        if one >= other {
            Self(format!("{one}{other}"))
        } else {
            Self(format!("{other}{one}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SparkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Active measurement/decoration scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Decorative mode: no labels, jittering sparks.
    Sparky,
    Pixels,
    Centimeters,
    Inches,
}

impl DisplayMode {
    /// Next mode in the fixed cycle (period 4).
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Sparky => DisplayMode::Pixels,
            DisplayMode::Pixels => DisplayMode::Centimeters,
            DisplayMode::Centimeters => DisplayMode::Inches,
            DisplayMode::Inches => DisplayMode::Sparky,
        }
    }

    /// Lowercase name shown in the HUD and used as the `<body>` class.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Sparky => "sparky",
            DisplayMode::Pixels => "pixels",
            DisplayMode::Centimeters => "centimeters",
            DisplayMode::Inches => "inches",
        }
    }
}

/// Everything the rendering surface needs to draw one spark.
#[derive(Clone, Debug, PartialEq)]
pub struct SparkStyle {
    /// Geometrically left endpoint; the spark is laid out from here.
    pub anchor: ContactPoint,
    /// Full-precision length in pixels; rounded only at render time.
    pub length: f64,
    pub angle_deg: f64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_key_is_symmetric() {
        let a = ContactId::from_touch(0);
        let b = ContactId::from_touch(17);
        assert_eq!(SparkKey::for_pair(&a, &b), SparkKey::for_pair(&b, &a));
    }

    #[test]
    fn spark_key_never_collides_across_distinct_pairs() {
        // Ids that would merge ambiguously without the `t` prefix
        // ("1"+"23" vs "12"+"3") stay distinct with it.
        let ids: Vec<ContactId> = (0..30).map(ContactId::from_touch).collect();
        let mut seen = std::collections::HashMap::new();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let key = SparkKey::for_pair(&ids[i], &ids[j]);
                if let Some(prev) = seen.insert(key.clone(), (i, j)) {
                    panic!("key {key} collides: pair {prev:?} vs ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn mode_cycle_has_period_four() {
        let start = DisplayMode::Sparky;
        let mut mode = start;
        for _ in 0..4 {
            mode = mode.next();
        }
        assert_eq!(mode, start);
        assert_eq!(DisplayMode::Sparky.next(), DisplayMode::Pixels);
        assert_eq!(DisplayMode::Inches.next(), DisplayMode::Sparky);
    }

    #[test]
    fn touch_ids_are_t_prefixed() {
        assert_eq!(ContactId::from_touch(4).as_str(), "t4");
        assert_eq!(ContactId::from_touch(-1).as_str(), "t-1");
    }
}

use std::borrow::Cow;

use crate::{default_formatter, DefaultFormatter, FormatValue, Mapping, Values};

/// A [`Values`] resolver built from a primary mapping, a fallback mapping
/// and a formatter.
///
/// A name is looked up in the primary mapping first. Only when the primary
/// mapping has no entry for it at all is the fallback ("alt") mapping
/// consulted: a present entry always wins, even when its value is `None` or
/// empty. The value found is then turned into text by the formatter.
///
/// Case sensitivity comes from the mappings themselves. Use
/// [`CaseInsensitiveMap`](crate::CaseInsensitiveMap) for both to get one
/// merged, case-insensitive namespace.
///
/// ```
/// use sharps::{render_raw, CaseInsensitiveMap, Delimiters, Model};
///
/// let values: CaseInsensitiveMap<Option<u32>> = [("No", Some(1))].into_iter().collect();
/// let alts: CaseInsensitiveMap<Option<u32>> =
///     [("no", Some(2)), ("club", None)].into_iter().collect();
/// let model = Model::new(values).with_alts(alts);
///
/// assert_eq!(
///     render_raw("##NO##/##club##/##other##", &model, &Delimiters::SHARPS),
///     "1//##other##",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Model<M, A, F> {
    values: M,
    alts: A,
    formatter: F,
}

impl<M> Model<M, M, DefaultFormatter<M::Value>>
where
    M: Mapping + Default,
    M::Value: FormatValue,
{
    /// A model with an empty fallback mapping and [`default_formatter`].
    pub fn new(values: M) -> Self {
        Self {
            values,
            alts: M::default(),
            formatter: default_formatter::<M::Value>,
        }
    }
}

impl<M, A, F> Model<M, A, F> {
    pub fn from_parts(values: M, alts: A, formatter: F) -> Self {
        Self {
            values,
            alts,
            formatter,
        }
    }

    /// Replace the fallback mapping.
    pub fn with_alts<A2>(self, alts: A2) -> Model<M, A2, F> {
        Model {
            values: self.values,
            alts,
            formatter: self.formatter,
        }
    }

    /// Replace the formatter.
    pub fn with_formatter<F2>(self, formatter: F2) -> Model<M, A, F2> {
        Model {
            values: self.values,
            alts: self.alts,
            formatter,
        }
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut M {
        &mut self.values
    }

    pub fn alts(&self) -> &A {
        &self.alts
    }

    pub fn alts_mut(&mut self) -> &mut A {
        &mut self.alts
    }

    pub fn into_parts(self) -> (M, A, F) {
        (self.values, self.alts, self.formatter)
    }
}

impl<M, A, F> Model<M, A, F>
where
    M: Mapping,
    A: Mapping<Value = M::Value>,
    F: Fn(&M::Value) -> String,
{
    /// Whether either mapping has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.alts.contains_key(key)
    }

    /// The raw value `key` resolves to, before formatting.
    pub fn lookup(&self, key: &str) -> Option<&M::Value> {
        self.values.get(key).or_else(|| self.alts.get(key))
    }

    /// Resolve and format `key`.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.lookup(key).map(&self.formatter)
    }
}

impl<M, A, F> Values for Model<M, A, F>
where
    M: Mapping,
    A: Mapping<Value = M::Value>,
    F: Fn(&M::Value) -> String,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.resolve(key).map(Cow::Owned)
    }
}

//! Session-scoped entry points.
//!
//! A [`MomentSession`] owns one set of base moments and the engine options.
//! Sessions share nothing, so a symbolic and a numeric session can be used
//! side by side.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::{BaseMoments, SessionConfig};
use crate::engine::MomentEngine;
use crate::error::{MomentError, Result};
use crate::hermite::parse_placeholder;
use crate::indexer::checked_index;
use crate::value::Value;

/// A computation session over one set of base moments.
#[derive(Clone, Debug, Default)]
pub struct MomentSession {
    base: Option<BaseMoments>,
    config: SessionConfig,
}

impl MomentSession {
    /// Creates a session with no base moments yet.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { base: None, config }
    }

    /// Creates a session with the default configuration.
    #[must_use]
    pub fn with_base_moments(base: BaseMoments) -> Self {
        Self {
            base: Some(base),
            config: SessionConfig::default(),
        }
    }

    /// Installs the base moments, replacing any previous ones.
    pub fn set_base_moments(&mut self, base: BaseMoments) {
        debug!(
            mu20 = %base.mu20(),
            mu02 = %base.mu02(),
            mu11 = %base.mu11(),
            numeric = base.is_fully_numeric(),
            "base moments set"
        );
        self.base = Some(base);
    }

    /// Returns the base moments.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::MissingBaseMoments`] if none have been set.
    pub fn base_moments(&self) -> Result<&BaseMoments> {
        self.base.as_ref().ok_or(MomentError::MissingBaseMoments)
    }

    /// Returns the engine options.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn engine(&self) -> Result<MomentEngine<'_>> {
        Ok(MomentEngine::from_config(self.base_moments()?, &self.config))
    }

    /// Computes the joint moment of a raw label sequence (each label 1 or 2).
    ///
    /// # Errors
    ///
    /// Fails on unsupported labels, missing base moments, or a sequence
    /// longer than the configured order limit.
    pub fn moment_of(&self, labels: &[i64]) -> Result<Value> {
        let mut engine = self.engine()?;
        self.config.check_order(labels.len() as u64)?;

        let value = engine.moment_of_labels(labels)?;
        debug!(
            order = labels.len(),
            evaluations = engine.evaluations(),
            terms = value.term_count(),
            "label moment computed"
        );
        Ok(value)
    }

    /// Computes `mu_{a,b} = E[Y1^a Y2^b]`.
    ///
    /// # Errors
    ///
    /// Fails on negative indices, missing base moments, or an order `a + b`
    /// above the configured limit.
    pub fn joint_moment(&self, a: i64, b: i64) -> Result<Value> {
        let a = checked_index("a", a)?;
        let b = checked_index("b", b)?;
        let mut engine = self.engine()?;
        self.config.check_order(u64::from(a) + u64::from(b))?;

        let value = engine.joint_moment(a, b);
        debug!(
            a,
            b,
            evaluations = engine.evaluations(),
            terms = value.term_count(),
            "joint moment computed"
        );
        Ok(value)
    }

    /// Builds the bivariate Hermite polynomial `H_{n,m}(y1, y2)`.
    ///
    /// `resolve` selects between full expansion into the base moments and
    /// placeholder moments (see [`crate::hermite::placeholder_name`]).
    ///
    /// # Errors
    ///
    /// Fails on negative indices, missing base moments, or an order `n + m`
    /// above the configured limit.
    pub fn hermite(&self, n: i64, m: i64, y1: &Value, y2: &Value, resolve: bool) -> Result<Value> {
        let n = checked_index("n", n)?;
        let m = checked_index("m", m)?;
        let mut engine = self.engine()?;
        self.config.check_order(u64::from(n) + u64::from(m))?;

        let value = engine.hermite(n, m, y1, y2, resolve);
        debug!(
            n,
            m,
            resolve,
            evaluations = engine.evaluations(),
            terms = value.term_count(),
            "hermite polynomial built"
        );
        Ok(value)
    }

    /// Replaces every placeholder moment in `value` by its joint moment and
    /// re-expands.
    ///
    /// Symbols that are not placeholder names are left alone.
    ///
    /// # Errors
    ///
    /// Fails on missing base moments or a placeholder whose order exceeds
    /// the configured limit.
    pub fn resolve_placeholders(&self, value: &Value) -> Result<Value> {
        let mut engine = self.engine()?;

        let placeholders: Vec<_> = value
            .free_symbols()
            .into_iter()
            .filter_map(|s| parse_placeholder(s.name()).map(|kj| (s, kj)))
            .collect();

        for (_, (k, j)) in &placeholders {
            self.config.check_order(u64::from(*k) + u64::from(*j))?;
        }

        let replacements: FxHashMap<_, _> = placeholders
            .into_iter()
            .map(|(s, (k, j))| (s, engine.joint_moment(k, j)))
            .collect();

        let resolved = value.substitute(&replacements);
        debug!(
            placeholders = replacements.len(),
            evaluations = engine.evaluations(),
            terms = resolved.term_count(),
            "placeholders resolved"
        );
        Ok(resolved)
    }
}

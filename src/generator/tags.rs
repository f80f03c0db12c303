use super::{Generator, Run};
use crate::constants::SATURATED_TAG_DENSITY;
use crate::error::Result;
use std::collections::HashSet;

/// Every tag used so far in a run, in first-use order so that a uniform
/// choice is reproducible.
#[derive(Debug, Default)]
pub struct TagPool {
    order: Vec<String>,
    members: HashSet<String>,
}

impl TagPool {
    /// Returns `false` if the tag was already pooled.
    pub fn insert(
        &mut self,
        tag: &str,
    ) -> bool {
        if self.members.contains(tag) {
            return false;
        }
        self.members.insert(tag.to_owned());
        self.order.push(tag.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

impl Generator {
    /// Tags `file_name` and records each tag in the ledger.
    pub(super) fn assign(
        &mut self,
        run: &mut Run,
        file_name: &str,
    ) -> Result<()> {
        let count = self
            .rng
            .range_inclusive(self.config.min_tags(), self.config.max_tags);
        let mut local: HashSet<String> = HashSet::with_capacity(count);
        for _ in 0..count {
            let mut tag = self.draw_tag(run);
            while local.contains(&tag) {
                tag = self.draw_tag(run);
            }
            run.pool.insert(&tag);
            run.ledger.append(file_name, &tag)?;
            local.insert(tag);

            // Saturated densities stop at one tag per file once the pool is populated.
            if !run.pool.is_empty() && self.config.tag_density >= SATURATED_TAG_DENSITY {
                break;
            }
        }
        Ok(())
    }

    fn draw_tag(
        &mut self,
        run: &mut Run,
    ) -> String {
        let sample = self.rng.unit();
        if sample < self.config.tag_density
            && let Some(tag) = self.rng.choose(run.pool.as_slice())
        {
            return tag.clone();
        }
        run.mint(&self.ids)
    }
}

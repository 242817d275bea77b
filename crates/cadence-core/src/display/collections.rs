//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Goal, Step};

/// Newtype wrapper for displaying a list of goals as summaries.
///
/// Each goal is one `##` section with its progress; steps are not expanded.
pub struct Goals(pub Vec<Goal>);

impl Goals {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of goals in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the goals.
    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.0.iter()
    }
}

impl Index<usize> for Goals {
    type Output = Goal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Goals {
    type Item = Goal;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Goals {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals found.");
        }
        for goal in &self.0 {
            writeln!(
                f,
                "## {} (ID: {}){}",
                goal.goal_text,
                goal.id,
                goal.progress()
            )?;
            writeln!(f)?;
            writeln!(f, "- **Skill**: {}", goal.skill_type)?;
            goal.fmt_constraints(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of steps.
pub struct Steps(pub Vec<Step>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{step}")?;
            }
            Ok(())
        }
    }
}

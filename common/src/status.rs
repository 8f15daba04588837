#[cfg(feature = "sea-orm")]
use sea_orm::entity::prelude::*;
// needed by the `DeriveActiveEnum` expansion
#[cfg(feature = "sea-orm")]
use sea_orm::sea_query;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Solicitation lifecycle. Stored and sent with its Portuguese label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sea-orm", derive(EnumIter, DeriveActiveEnum))]
#[cfg_attr(
    feature = "sea-orm",
    sea_orm(rs_type = "String", db_type = "String(Some(16))")
)]
pub enum Status {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Criada"))]
    #[serde(rename = "Criada")]
    Created,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Em andamento"))]
    #[serde(rename = "Em andamento")]
    InProgress,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Concluida"))]
    #[serde(rename = "Concluida")]
    Finished,
}

impl Status {
    pub const fn label(self) -> &'static str {
        match self {
            Status::Created => "Criada",
            Status::InProgress => "Em andamento",
            Status::Finished => "Concluida",
        }
    }

    /// Statuses an employee may move a solicitation to from `self`.
    pub const fn next(self) -> &'static [Status] {
        match self {
            Status::Created => &[Status::InProgress, Status::Finished],
            Status::InProgress => &[Status::Created, Status::Finished],
            // re-opening is the only way out of a finished solicitation
            Status::Finished => &[Status::Created],
        }
    }

    #[inline]
    pub fn can_transition_to(self, next: Status) -> bool {
        self.next().contains(&next)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_can_only_be_reopened() {
        assert!(Status::Finished.can_transition_to(Status::Created));
        assert!(!Status::Finished.can_transition_to(Status::InProgress));
        assert!(!Status::Finished.can_transition_to(Status::Finished));
    }

    #[test]
    fn open_statuses_can_move_anywhere_else() {
        assert!(Status::Created.can_transition_to(Status::InProgress));
        assert!(Status::Created.can_transition_to(Status::Finished));
        assert!(Status::InProgress.can_transition_to(Status::Finished));
        assert!(Status::InProgress.can_transition_to(Status::Created));
        assert!(!Status::InProgress.can_transition_to(Status::InProgress));
        assert!(!Status::Created.can_transition_to(Status::Created));
    }

    #[test]
    fn labels_match_the_wire() {
        for status in [Status::Created, Status::InProgress, Status::Finished] {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.label())
            );
        }
    }
}

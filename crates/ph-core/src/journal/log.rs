//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::{JournalEntry, SeasonEvent};

/// A chronological log of season events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Stamp an event with the current time and append it.
    pub fn record(&mut self, event: SeasonEvent) {
        self.append(JournalEntry::now(event));
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Season Journal\n\n");
        for entry in &self.entries {
            match &entry.event {
                SeasonEvent::ActorHired { actor, name } => {
                    out.push_str(&format!("**Hired** #{actor} {name}\n\n"));
                }
                SeasonEvent::ActorUpdated { actor, name } => {
                    out.push_str(&format!("**Updated** #{actor} {name}\n\n"));
                }
                SeasonEvent::ActorDismissed { actor, name } => {
                    out.push_str(&format!("**Dismissed** #{actor} {name}\n\n"));
                }
                SeasonEvent::PerformanceCommitted {
                    performance,
                    title,
                    year,
                    budget,
                } => {
                    out.push_str(&format!("## {year}: {title} (#{performance})\n\n"));
                    out.push_str(&format!("**Budget committed**: {budget}\n\n"));
                }
                SeasonEvent::CastAssigned {
                    actor,
                    role,
                    contract_cost,
                    ..
                } => {
                    out.push_str(&format!(
                        "- *{role}*: actor #{actor}, contract {contract_cost}\n"
                    ));
                }
                SeasonEvent::PerformanceResolved {
                    title,
                    tier,
                    revenue,
                    expenses,
                    profit,
                    ..
                } => {
                    out.push_str(&format!("\n**{title}**: {tier}\n"));
                    out.push_str(&format!(
                        "  Revenue {revenue}, expenses {expenses}, profit {profit}\n\n"
                    ));
                }
                SeasonEvent::ActorAwarded {
                    name,
                    awards_count,
                    promoted_to,
                    ..
                } => {
                    out.push_str(&format!("**Award** {name} (total {awards_count})"));
                    if let Some(rank) = promoted_to {
                        out.push_str(&format!(", promoted to {rank}"));
                    }
                    out.push_str("\n\n");
                }
                SeasonEvent::YearSkipped { year, rights_sale } => {
                    out.push_str(&format!(
                        "*Year skipped*: now {year}, rights sold for {rights_sale}\n\n"
                    ));
                }
            }
        }
        out
    }

    /// Export the journal as plain text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Season Journal\n==============\n\n");
        for entry in &self.entries {
            let stamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
            out.push_str(&format!("[{stamp}] {}\n", describe(&entry.event)));
        }
        out
    }
}

/// One-line plain description of an event.
pub fn describe(event: &SeasonEvent) -> String {
    match event {
        SeasonEvent::ActorHired { actor, name } => format!("Hired #{actor} {name}"),
        SeasonEvent::ActorUpdated { actor, name } => format!("Updated #{actor} {name}"),
        SeasonEvent::ActorDismissed { actor, name } => format!("Dismissed #{actor} {name}"),
        SeasonEvent::PerformanceCommitted {
            performance,
            title,
            year,
            budget,
        } => format!("Committed #{performance} '{title}' for {year} with budget {budget}"),
        SeasonEvent::CastAssigned {
            performance,
            actor,
            role,
            contract_cost,
        } => format!(
            "Cast actor #{actor} as {role} in #{performance} for {contract_cost}"
        ),
        SeasonEvent::PerformanceResolved {
            performance,
            title,
            tier,
            revenue,
            expenses,
            profit,
        } => format!(
            "Resolved #{performance} '{title}': {tier}, revenue {revenue}, expenses {expenses}, profit {profit}"
        ),
        SeasonEvent::ActorAwarded {
            name,
            awards_count,
            promoted_to,
            ..
        } => match promoted_to {
            Some(rank) => format!("Award for {name} (total {awards_count}), promoted to {rank}"),
            None => format!("Award for {name} (total {awards_count})"),
        },
        SeasonEvent::YearSkipped { year, rights_sale } => {
            format!("Skipped to {year}, rights sold for {rights_sale}")
        }
    }
}

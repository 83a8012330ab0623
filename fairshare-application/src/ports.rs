use crate::{error::LedgerError, model::Group};
use fairshare_domain::{CurrencyContext, ParticipantId};
use indexmap::IndexMap;
use std::collections::HashMap;

pub trait LedgerParser: Send + Sync {
    fn parse(&self, content: &str, currency: CurrencyContext) -> Result<Group, LedgerError>;
}

pub trait ParticipantDirectory: Send + Sync {
    fn display_name(&self, id: &ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl ParticipantDirectory for IndexMap<ParticipantId, String> {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

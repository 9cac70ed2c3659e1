//! Commands acting on CCAs.

use crate::commands::CommandResult;
use crate::domain::{Cid, Index, Pid};
use crate::error::{CommandError, ExecutionResult};
use crate::models::address_book::{CCA, PERSON};
use crate::models::{Cca, Model};
use tracing::info;

pub const CCA_ADD_USAGE: &str = "cca add: Adds a CCA to the address book. \
Parameters: n/NAME\n\
Example: cca add n/NUSSO";

pub const CCA_DELETE_USAGE: &str = "cca delete: Deletes the CCA identified by the index number \
used in the CCA list. Members are withdrawn from it.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: cca delete 1";

pub const CCA_ENROL_USAGE: &str = "cca enrol: Enrols a person into a CCA. \
Parameters: c/CID p/PID (positions in the CCA and displayed person lists)\n\
Example: cca enrol c/1 p/2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcaAddCommand {
    pub cca: Cca,
}

impl CcaAddCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        model.address_book_mut().add_cca(self.cca.clone())?;
        info!(name = %self.cca.name(), "Added CCA");
        Ok(CommandResult::new(format!("New CCA added: {}", self.cca)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcaDeleteCommand {
    pub index: Index,
}

impl CcaDeleteCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        let target = model.cca_at(self.index)?.clone();
        if !model.address_book_mut().remove_cca(&target) {
            return Err(CommandError::InvalidIndex { kind: CCA });
        }
        info!(name = %target.name(), "Deleted CCA");
        Ok(CommandResult::new(format!("Deleted CCA: {}", target)))
    }
}

/// Enrols person `pid` into CCA `cid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcaEnrolCommand {
    pub cid: Cid,
    pub pid: Pid,
}

impl CcaEnrolCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        let cca_index = self
            .cid
            .to_index()
            .ok_or(CommandError::InvalidIndex { kind: CCA })?;
        let person_index = self
            .pid
            .to_index()
            .ok_or(CommandError::InvalidIndex { kind: PERSON })?;

        let cca = model.cca_at(cca_index)?.name().clone();
        let person = model.person_at(person_index)?.clone();
        if person.is_enrolled_in(&cca) {
            return Err(CommandError::AlreadyEnrolled {
                person: person.name().to_string(),
                cca: cca.to_string(),
            });
        }

        let enrolled = person.enrolled_in(cca.clone());
        model.address_book_mut().set_person(&person, enrolled)?;
        info!(cca = %cca, person = %person.name(), "Enrolled person");
        Ok(CommandResult::new(format!(
            "Enrolled {} in {}",
            person.name(),
            cca
        )))
    }
}

pub fn list_ccas(model: &Model) -> CommandResult {
    let ccas = model.address_book().ccas();
    if ccas.is_empty() {
        return CommandResult::new("No CCAs in the address book");
    }
    let lines: Vec<String> = ccas
        .iter()
        .enumerate()
        .map(|(i, cca)| {
            let members = model
                .address_book()
                .persons()
                .iter()
                .filter(|p| p.is_enrolled_in(cca.name()))
                .count();
            format!("{}. {} ({} members)", i + 1, cca, members)
        })
        .collect();
    CommandResult::new(format!("Listed all CCAs\n{}", lines.join("\n")))
}

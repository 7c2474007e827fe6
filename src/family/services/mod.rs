//! Application services for the family ledger.

mod ledger;

pub use ledger::{
    CreateFamilyRequest, FamilyLedgerError, FamilyLedgerResult, FamilyLedgerService,
    UpdateFamilyRequest,
};

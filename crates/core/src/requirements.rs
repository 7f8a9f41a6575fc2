//! Command preconditions
//!
//! Commands check these before touching the network so a missing login or
//! target fails fast with instructions instead of a server error.

use cfkit_domain::Configuration;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementError {
    #[error("Not logged in. Use 'cf login' to log in.")]
    NotLoggedIn,

    #[error("No org targeted, use 'cf target -o ORG' to target an org.")]
    NoOrgTargeted,

    #[error("No space targeted, use 'cf target -s SPACE' to target a space.")]
    NoSpaceTargeted,

    #[error("No org and space targeted, use 'cf target -o ORG -s SPACE' to target an org and space")]
    NoOrgAndSpaceTargeted,
}

/// A precondition a command declares before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Login,
    TargetedOrganization,
    TargetedSpace,
}

impl Requirement {
    pub fn check(self, config: &Configuration) -> Result<(), RequirementError> {
        match self {
            Self::Login => {
                if config.is_logged_in() {
                    Ok(())
                } else {
                    Err(RequirementError::NotLoggedIn)
                }
            }
            Self::TargetedOrganization => {
                if config.has_organization() {
                    Ok(())
                } else {
                    Err(RequirementError::NoOrgTargeted)
                }
            }
            Self::TargetedSpace => {
                if !config.has_organization() {
                    Err(RequirementError::NoOrgAndSpaceTargeted)
                } else if !config.has_space() {
                    Err(RequirementError::NoSpaceTargeted)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Check every requirement in order, stopping at the first failure.
pub fn check_all(requirements: &[Requirement], config: &Configuration) -> Result<(), RequirementError> {
    requirements.iter().try_for_each(|requirement| requirement.check(config))
}

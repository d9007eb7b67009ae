//! Per-contract-type blueprints: canonical section order plus drafting guidance.

use serde::{Deserialize, Serialize};

use crate::ContractType;

/// Canonical section list and drafting guidance for one contract type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub contract_type: ContractType,
    /// Canonical section titles, in the order they appear in a finished contract
    pub sections: Vec<String>,
    /// Free-text guidance handed to whoever drafts the contract
    #[serde(default)]
    pub guidance: String,
}

impl Blueprint {
    pub fn new(contract_type: ContractType, sections: &[&str], guidance: &str) -> Self {
        Self {
            contract_type,
            sections: sections.iter().map(|s| s.to_string()).collect(),
            guidance: guidance.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// The compiled-in blueprints, one per [`ContractType`].
pub(crate) fn builtin_blueprints() -> Vec<Blueprint> {
    vec![
        Blueprint::new(
            ContractType::GolfOuting,
            &[
                "Parties & Event Overview",
                "Event Date, Time & Location",
                "Golf Package & Inclusions",
                "Food & Beverage",
                "Pricing & Payment Schedule",
                "Deposit & Cancellation Policy",
                "Weather & Rain-Out Policy",
                "Guest Count & Guarantees",
                "Course Rules & Conduct",
                "Liability & Insurance",
                "Force Majeure",
                "Governing Law",
                "Signatures",
            ],
            "Identify the host organization and the club. State the shotgun or tee-time \
             start, number of players and carts, and what each player package includes. \
             Spell out the rain-out policy (rain checks vs. refunds), the final guarantee \
             deadline, and the deposit schedule.",
        ),
        Blueprint::new(
            ContractType::GolfLeague,
            &[
                "Parties & League Overview",
                "League Schedule & Tee Times",
                "Membership Fees & Payment",
                "Course Access & Playing Privileges",
                "Handicaps & Scoring",
                "Weather & Make-Up Rounds",
                "Player Conduct",
                "Termination & Refunds",
                "Liability & Insurance",
                "Governing Law",
                "Signatures",
            ],
            "Describe the season length, weekly tee-time block and roster size. State \
             how fees are billed (per player or per team), how handicaps are kept, and \
             how weather cancellations are made up or credited.",
        ),
        Blueprint::new(
            ContractType::Wedding,
            &[
                "Parties & Event Overview",
                "Event Date, Time & Venue",
                "Ceremony & Reception Spaces",
                "Food & Beverage",
                "Guest Count & Guarantees",
                "Pricing & Payment Schedule",
                "Deposit & Cancellation Policy",
                "Vendors & Outside Services",
                "Decor, Setup & Teardown",
                "Damages & Security Deposit",
                "Liability & Insurance",
                "Force Majeure",
                "Governing Law",
                "Signatures",
            ],
            "Name the couple (or the contracting party paying on their behalf) and the \
             venue. Cover ceremony and reception timing, menu and bar service, the final \
             headcount deadline, approved outside vendors, and the cancellation and \
             rescheduling terms.",
        ),
        Blueprint::new(
            ContractType::SpecialEvent,
            &[
                "Parties & Event Overview",
                "Event Date, Time & Location",
                "Services & Deliverables",
                "Food & Beverage",
                "Guest Count & Guarantees",
                "Pricing & Payment Schedule",
                "Deposit & Cancellation Policy",
                "Permits & Compliance",
                "Liability & Insurance",
                "Force Majeure",
                "Governing Law",
                "Signatures",
            ],
            "Describe the event, its schedule and the services the venue provides. State \
             who obtains permits, the guarantee deadline, pricing and payment milestones, \
             and what happens if the event is cancelled or moved.",
        ),
        Blueprint::new(
            ContractType::Other,
            &[
                "Parties & Purpose",
                "Scope of Services",
                "Term & Termination",
                "Compensation & Payment",
                "Confidentiality",
                "Representations & Warranties",
                "Indemnification",
                "Limitation of Liability",
                "Force Majeure",
                "Dispute Resolution",
                "Governing Law",
                "Entire Agreement",
                "Signatures",
            ],
            "Use standard commercial structure. Define the parties and the purpose of the \
             agreement, the scope of work, payment terms, term and termination rights, and \
             the allocation of risk.",
        ),
    ]
}

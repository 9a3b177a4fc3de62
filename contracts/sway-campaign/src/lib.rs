//! Group-buy campaign escrow.
//!
//! One contract instance is deployed per campaign. Participants deposit the
//! fixed campaign price to join, sellers bond the same price to submit a
//! competing offer, and after the end date anyone can settle the campaign:
//! the lowest offer wins the pooled deposits minus the platform commission.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;

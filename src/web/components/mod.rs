// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod icon;
mod modal;
mod my_tickets;
mod ticket_form;

pub use icon::Icon;
pub use modal::Modal;
pub use my_tickets::MyTickets;
pub use ticket_form::TicketForm;

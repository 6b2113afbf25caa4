//! Full-screen compositions.
//!
//! One function per connection state:
//!
//! - **Connect screen** ([`connect`]): empty ring tracks and a prompt while
//!   no broker session is up
//! - **Dashboard** ([`dashboard`]): the live energy dial
//!
//! Screens compose widgets in back-to-front order onto a cleared display;
//! they hold no state of their own. The app core picks which screen to draw
//! from its connection state.

mod connect;
mod dashboard;

pub use connect::draw_connect_screen;
pub use dashboard::draw_dashboard_screen;

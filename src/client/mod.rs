//! Client side of the cafe like button.
//!
//! [`LikeToggle`] is bound to a [`Form`] carrying a `cafe-id` attribute. Each
//! submission asks the service whether the signed-in user already likes the
//! cafe, then flips the state through [`LikesApi`] and relabels the
//! [`Button`].

mod dom;
mod error;
mod http;
mod like_toggle;

pub use dom::{Button, Form, SubmitEvent, Submission};
pub use error::{ClientError, ClientResult};
pub use http::{HttpLikesApi, LikeStatus, LikesApi};
pub use like_toggle::{LikeToggle, CAFE_ID_ATTRIBUTE, LIKED_LABEL, LIKE_LABEL};

// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Share URL Builder
//!
//! Maps a platform id and the current page's absolute URL to the
//! provider's share or compose URL.
//!
//! The page URL is appended verbatim. It is not percent-encoded, so a page
//! URL carrying its own query string leaks parameters into the share URL.
//! Existing share links depend on this form.

/// Returns the share prefix for a platform id.
///
/// Ids are case-sensitive. Unknown ids get an empty prefix.
pub fn share_prefix(platform_id: &str) -> &'static str {
    match platform_id {
        "facebook" => "http://facebook.com/sharer.php?u=",
        "linkedin" => "http://www.linkedin.com/shareArticle?url=",
        "twitter" => "http://twitter.com/intent/tweet?url=",
        "mail" => "mailto:?body=",
        "googleplus" => "https://plus.google.com/share?url=",
        "reddit" => "https://www.reddit.com/submit?url=",
        _ => "",
    }
}

/// Builds the share URL for `platform_id` pointing at `page_url`.
///
/// # Examples
///
/// ```
/// use socialmedia_core::share::share_url;
///
/// assert_eq!(
///     share_url("twitter", "https://example.com/a"),
///     "http://twitter.com/intent/tweet?url=https://example.com/a"
/// );
/// assert_eq!(share_url("myspace", "https://example.com/a"), "https://example.com/a");
/// ```
pub fn share_url(platform_id: &str, page_url: &str) -> String {
    let prefix = share_prefix(platform_id);
    let mut url = String::with_capacity(prefix.len() + page_url.len());
    url.push_str(prefix);
    url.push_str(page_url);
    url
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top-level view routing.
//!
//! The app is a single screen that swaps which page renders. Navigation is a
//! plain state transition; there is no URL routing.

/// Pages the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page shown before sign-in.
    #[default]
    Branding,
    SignIn,
    SignUp,
    Home,
    AdminHome,
    Workplace,
    DailyLog,
    Chat,
    Analytics,
    Profile,
}

impl Page {
    /// Pages that are part of the sign-in flow.
    pub fn is_auth(self) -> bool {
        matches!(self, Page::SignIn | Page::SignUp)
    }

    /// Pages whose content scrolls; the rest pin the viewport so the forest
    /// canvas fills it.
    pub fn is_scrollable(self) -> bool {
        matches!(self, Page::Branding | Page::Workplace | Page::Analytics)
    }
}

/// Current page plus the transitions the shell supports.
#[derive(Debug, Default)]
pub struct Router {
    page: Page,
}

impl Router {
    pub fn current(&self) -> Page {
        self.page
    }

    /// Jump to any page (nav bar, branding call-to-action).
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = ?self.page, to = ?page, "Page change");
        self.page = page;
    }

    /// Successful sign-in or sign-up lands on the home forest.
    pub fn auth_succeeded(&mut self) {
        self.navigate(Page::Home);
    }

    /// Signing out returns to the branding page.
    pub fn signed_out(&mut self) {
        self.navigate(Page::Branding);
    }
}

//! Target resolution.

use crate::MessageContext;
use giotto_core::{GuildDirectory, ResolvedTarget, RoleId, TargetToken, UserId};

/// Decide the role or user a directive applies to.
///
/// Platform-native mentions are unambiguous and win over any textual ID,
/// roles before users. A sigil-decorated textual token is typed by its
/// sigil; a bare numeric ID is tried as a role, then as a user, since the
/// two share an ID namespace. `*` and everything unresolvable degrade to
/// the guild's default (everyone) role — there is no failure path.
pub fn resolve_target(
    ctx: &MessageContext,
    token: Option<&str>,
    directory: &dyn GuildDirectory,
) -> ResolvedTarget {
    let guild = *ctx.guild();
    if let Some(&role) = ctx.role_mentions().first() {
        return ResolvedTarget::Role(role);
    }
    if let Some(&user) = ctx.user_mentions().first() {
        return ResolvedTarget::Member(user);
    }

    let fallback = ResolvedTarget::Role(directory.everyone_role(guild));
    let Some(token) = token else {
        return fallback;
    };
    match TargetToken::parse(token) {
        TargetToken::Everyone | TargetToken::Unresolved => fallback,
        TargetToken::Role(role) => {
            if directory.role_exists(guild, role) {
                ResolvedTarget::Role(role)
            } else {
                fallback
            }
        }
        TargetToken::User(user) => {
            if directory.member_exists(guild, user) {
                ResolvedTarget::Member(user)
            } else {
                fallback
            }
        }
        TargetToken::Ambiguous(id) => {
            let role = RoleId::new(id);
            if directory.role_exists(guild, role) {
                return ResolvedTarget::Role(role);
            }
            let user = UserId::new(id);
            if directory.member_exists(guild, user) {
                ResolvedTarget::Member(user)
            } else {
                fallback
            }
        }
    }
}

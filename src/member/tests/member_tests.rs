//! Unit tests for the member aggregate.

use crate::member::domain::{Member, MemberDomainError, MemberStatus, PersistedMemberData};
use eyre::{bail, ensure};
use rstest::{fixture, rstest};

#[fixture]
fn draft_member() -> Result<Member, MemberDomainError> {
    Member::create("alice01", "$argon2id$stub-hash", "Alice", "Asia/Seoul")
}

#[rstest]
fn create_starts_active(draft_member: Result<Member, MemberDomainError>) -> eyre::Result<()> {
    let member = draft_member?;
    ensure!(member.status() == MemberStatus::Active);
    ensure!(member.login_id().as_str() == "alice01");
    ensure!(member.nickname() == "Alice");
    ensure!(member.time_zone() == "Asia/Seoul");
    Ok(())
}

#[rstest]
#[case("", MemberDomainError::BlankNickname)]
#[case("   ", MemberDomainError::BlankNickname)]
#[case(" Alice", MemberDomainError::NicknameEdgeWhitespace)]
#[case("Alice ", MemberDomainError::NicknameEdgeWhitespace)]
fn invalid_nicknames_are_rejected(
    #[case] nickname: &str,
    #[case] expected: MemberDomainError,
) -> eyre::Result<()> {
    let result = Member::create("alice01", "$argon2id$stub-hash", nickname, "Asia/Seoul");
    if result != Err(expected.clone()) {
        bail!("expected {expected:?}, got {result:?}");
    }
    Ok(())
}

#[rstest]
fn overlong_nickname_reports_character_count() -> eyre::Result<()> {
    let nickname = "가".repeat(51);
    let result = Member::create("alice01", "$argon2id$stub-hash", &nickname, "Asia/Seoul");
    ensure!(result == Err(MemberDomainError::NicknameTooLong(51)));
    Ok(())
}

#[rstest]
fn nickname_with_interior_whitespace_is_kept(
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut member = draft_member?;
    member.change_nickname("Alice the Second")?;
    ensure!(member.nickname() == "Alice the Second");
    Ok(())
}

#[rstest]
fn failed_nickname_change_leaves_member_untouched(
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut member = draft_member?;
    let result = member.change_nickname("  ");
    ensure!(result == Err(MemberDomainError::BlankNickname));
    ensure!(member.nickname() == "Alice");
    Ok(())
}

#[rstest]
fn change_password_replaces_the_hash(
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut member = draft_member?;
    member.change_password("$argon2id$new-hash")?;
    ensure!(member.password_hash().as_str() == "$argon2id$new-hash");
    Ok(())
}

#[rstest]
fn failed_password_change_keeps_old_hash(
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut member = draft_member?;
    let result = member.change_password("");
    ensure!(result == Err(MemberDomainError::EmptyPasswordHash));
    ensure!(member.password_hash().as_str() == "$argon2id$stub-hash");
    Ok(())
}

#[rstest]
#[case(MemberStatus::Suspended)]
#[case(MemberStatus::Withdrawn)]
#[case(MemberStatus::Active)]
fn change_status_is_unrestricted(
    #[case] target: MemberStatus,
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut member = draft_member?;
    member.change_status(target);
    ensure!(member.status() == target);
    Ok(())
}

#[rstest]
fn from_persisted_restores_every_field(
    draft_member: Result<Member, MemberDomainError>,
) -> eyre::Result<()> {
    let mut original = draft_member?;
    original.change_status(MemberStatus::Suspended);

    let restored = Member::from_persisted(PersistedMemberData {
        login_id: original.login_id().clone(),
        password_hash: original.password_hash().clone(),
        nickname: original.nickname().to_owned(),
        status: original.status(),
        time_zone: original.time_zone().to_owned(),
    });

    ensure!(restored == original);
    Ok(())
}

#[rstest]
fn blank_time_zone_is_rejected() -> eyre::Result<()> {
    let result = Member::create("alice01", "$argon2id$stub-hash", "Alice", " ");
    ensure!(result == Err(MemberDomainError::BlankTimeZone));
    Ok(())
}

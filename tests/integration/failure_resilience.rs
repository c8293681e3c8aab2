//! The run keeps going when individual deletes or copies fail.

#![cfg(unix)]

use crate::support::{pair, permissions_enforced};
use dirsync::engine;
use dirsync::fileops::RunContext;
use std::fs;
use std::os::unix::fs::symlink;

#[test]
fn undeletable_orphan_is_recorded_and_rest_of_plan_executes() {
    let p = pair();
    // An orphaned dangling symlink: not a file, and not removable as a
    // directory tree either.
    symlink(p.temp.path().join("nowhere"), p.target.join("ghost")).unwrap();
    fs::write(p.target.join("stray.txt"), "stray").unwrap();
    fs::write(p.source.join("new.txt"), "new").unwrap();

    let mut ctx = RunContext::default();
    engine::sync(&mut ctx, &p.source, &p.target).unwrap();

    assert_eq!(ctx.ledger.failed_deletes(), &[p.target.join("ghost")]);
    assert!(!p.target.join("stray.txt").exists());
    assert_eq!(
        fs::read_to_string(p.target.join("new.txt")).unwrap(),
        "new"
    );
}

#[test]
fn permission_denied_delete_is_recorded_and_run_continues() {
    use std::os::unix::fs::PermissionsExt;

    let p = pair();
    if !permissions_enforced(p.temp.path()) {
        return;
    }

    let locked = p.target.join("locked");
    fs::create_dir_all(locked.join("inner")).unwrap();
    fs::write(locked.join("inner").join("pinned.txt"), "pinned").unwrap();
    fs::set_permissions(locked.join("inner"), fs::Permissions::from_mode(0o555)).unwrap();
    fs::write(p.target.join("stray.txt"), "stray").unwrap();
    fs::write(p.source.join("new.txt"), "new").unwrap();

    let mut ctx = RunContext::default();
    let result = engine::sync(&mut ctx, &p.source, &p.target);

    fs::set_permissions(locked.join("inner"), fs::Permissions::from_mode(0o755)).unwrap();

    result.unwrap();
    assert_eq!(ctx.ledger.failed_deletes(), &[locked.clone()]);
    assert!(!p.target.join("stray.txt").exists());
    assert!(p.target.join("new.txt").exists());
}

#[test]
fn uncopyable_source_is_recorded_and_rest_is_copied() {
    let p = pair();
    symlink(p.temp.path().join("nowhere"), p.source.join("ghost")).unwrap();
    fs::write(p.source.join("ok.txt"), "ok").unwrap();

    let mut ctx = RunContext::default();
    engine::sync(&mut ctx, &p.source, &p.target).unwrap();

    assert_eq!(ctx.ledger.failed_copies(), &[p.source.join("ghost")]);
    assert_eq!(fs::read_to_string(p.target.join("ok.txt")).unwrap(), "ok");
    assert!(ctx.ledger.failed_deletes().is_empty());
}

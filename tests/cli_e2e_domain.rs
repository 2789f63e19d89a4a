//! End-to-end tests for domain (`-d` / `+d`) and directory (`-f` / `+f`)
//! loading.

mod common;
use common::prelude::*;
use common::stdout_of;

fn two_platform_domain() -> TestFixture {
    TestFixture::new()
        .with_platforms("best worst")
        .with_file("dom/worst/bin/a", "")
        .with_file("dom/best/bin/b", "")
        .with_file("dom/best/etc/profile.d/zz.sh", "")
        .with_file("dom/best/etc/profile.d/aa.sh", "")
        .with_file("dom/best/etc/profile.d/aa.csh", "")
}

#[test]
fn test_domain_applies_worst_platform_first() {
    let fixture = two_platform_domain();
    let script = stdout_of(
        fixture
            .command()
            .args(["sh", "-d"])
            .arg(fixture.path_of("dom")),
    );

    let worst = script
        .find(&format!("export PATH=\"{}:${{PATH}}\"", fixture.display("dom/worst/bin")))
        .expect("worst platform exported");
    let best = script
        .find(&format!("export PATH=\"{}:${{PATH}}\"", fixture.display("dom/best/bin")))
        .expect("best platform exported");
    assert!(worst < best);
}

#[test]
fn test_domain_profiles_sorted_and_filtered() {
    let fixture = two_platform_domain();
    let script = stdout_of(
        fixture
            .command()
            .args(["sh", "+d"])
            .arg(fixture.path_of("dom")),
    );

    let aa = script
        .find(&format!(". \"{}\"", fixture.display("dom/best/etc/profile.d/aa.sh")))
        .expect("aa.sh sourced");
    let zz = script
        .find(&format!(". \"{}\"", fixture.display("dom/best/etc/profile.d/zz.sh")))
        .expect("zz.sh sourced");
    assert!(aa < zz);
    assert!(!script.contains("aa.csh"));
}

#[test]
fn test_domain_ignores_unlisted_platforms() {
    let fixture = TestFixture::new()
        .with_platforms("linux")
        .with_file("dom/aix/bin/a", "");

    fixture
        .command()
        .args(["sh", "-d"])
        .arg(fixture.path_of("dom"))
        .assert()
        .success()
        .stdout(predicate::str::contains("/aix/").not());
}

#[test]
fn test_invalid_domain() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["sh", "-d"])
        .arg(fixture.path_of("missing"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fatal: loaddomain: invalid domain"));
}

#[test]
fn test_directory_tree_with_extra_libdirs() {
    let fixture = TestFixture::new()
        .with_file("tree/lib/README.txt", "")
        .with_file("tree/lib/x86_64/libz.a", "")
        .with_file("tree/include/zlib.h", "");

    let script = stdout_of(
        fixture
            .command()
            .env("SSMUSE_LIBDIRS", "%ARCH%")
            .env("ARCH", "x86_64")
            .args(["sh", "-f", "./tree"]),
    );

    assert!(script.contains("unset SSMUSE_PENDMODE"));
    assert!(script.contains("export LD_LIBRARY_PATH=\"./tree/lib/x86_64:${LD_LIBRARY_PATH}\""));
    assert!(!script.contains("\"./tree/lib:"));
    assert!(script.contains("export CPATH=\"./tree/include:${CPATH}\""));
    assert!(script.contains("export SSM_INCLUDE_PATH=\"./tree/include\""));
}

#[test]
fn test_missing_directory_is_not_an_error() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["sh", "+f", "./nothing-here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing-here").not());
}

#[test]
fn test_banner_lists_platforms() {
    let fixture = TestFixture::new().with_platforms("linux26-x86-64 all");

    fixture
        .command()
        .arg("csh")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# host ("))
        .stdout(predicate::str::contains("# platforms (linux26-x86-64 all)"))
        .stdout(predicate::str::contains("unsetenv SSMUSE_PENDMODE"));
}

#[test]
fn test_verbose_traces() {
    let fixture = TestFixture::new().with_file("tree/bin/x", "");

    fixture
        .command()
        .args(["sh", "-v", "-f", "./tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "echo \"exportpendpaths: (prepend) (./tree)\" 1>&2",
        ));
}

#[test]
fn test_verbose_applies_from_its_position() {
    let fixture = TestFixture::new()
        .with_file("first/bin/x", "")
        .with_file("second/bin/y", "");

    fixture
        .command()
        .args(["sh", "-f", "./first", "-v", "-f", "./second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loaddirectory: (prepend) (./second)"))
        .stdout(predicate::str::contains("loaddirectory: (prepend) (./first)").not());
}

//! Canned solution layouts for end-to-end tests
//!
//! Each layout writes real descriptor files into a [`TempDirFixture`] and
//! returns the root file to analyze.

use anyhow::{Result, anyhow};
use projgraph_lib::testing::{ProjectXml, TempDirFixture};
use std::path::PathBuf;
use uuid::Uuid;

pub fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Layouts available to the scenario tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Solution listing App and Lib; App -> {Left, Right} -> Base
    Diamond,
    /// One -> Two -> Three -> One, entered from One
    Cycle,
    /// Native app linking `Engine.lib` and `user32.lib`, Engine in the same solution
    NativeLibraries,
    /// Native app linking `Shared.lib`; a second solution builds Shared with
    /// two dependencies. Returns the primary root.
    MergePair,
}

impl Layout {
    pub fn write(self, fixture: &TempDirFixture) -> Result<PathBuf> {
        let written = match self {
            Layout::Diamond => diamond(fixture),
            Layout::Cycle => cycle(fixture),
            Layout::NativeLibraries => native_libraries(fixture),
            Layout::MergePair => merge_pair(fixture),
        };
        written.map_err(|e| anyhow!("Failed to write {self:?} layout: {e}"))
    }
}

type Written = Result<PathBuf, Box<dyn std::error::Error>>;

fn diamond(fixture: &TempDirFixture) -> Written {
    fixture.write_project(
        "App/App.csproj",
        &ProjectXml::new()
            .guid(uid(1))
            .name("App")
            .framework("v4.8")
            .reference("..\\Left\\Left.csproj", Some(uid(2)))
            .reference("..\\Right\\Right.csproj", Some(uid(3))),
    )?;
    fixture.write_project(
        "Left/Left.csproj",
        &ProjectXml::new()
            .guid(uid(2))
            .name("Left")
            .reference("..\\Base\\Base.csproj", Some(uid(4))),
    )?;
    fixture.write_project(
        "Right/Right.csproj",
        &ProjectXml::new()
            .guid(uid(3))
            .name("Right")
            .reference("..\\Base\\Base.csproj", None),
    )?;
    fixture.write_project("Base/Base.csproj", &ProjectXml::new().guid(uid(4)).name("Base"))?;
    fixture.write_solution(
        "Diamond.sln",
        &[
            ("App", "App\\App.csproj", uid(1)),
            ("Left", "Left\\Left.csproj", uid(2)),
        ],
    )
}

fn cycle(fixture: &TempDirFixture) -> Written {
    let names = ["One", "Two", "Three"];
    for (index, name) in names.iter().enumerate() {
        let next = names[(index + 1) % names.len()];
        fixture.write_project(
            &format!("{name}/{name}.vcxproj"),
            &ProjectXml::new()
                .guid(uid(index as u128 + 10))
                .name(name)
                .configuration_type("StaticLibrary")
                .reference(&format!("..\\{next}\\{next}.vcxproj"), None),
        )?;
    }
    Ok(fixture.file("One/One.vcxproj"))
}

fn native_libraries(fixture: &TempDirFixture) -> Written {
    fixture.write_project(
        "App/App.vcxproj",
        &ProjectXml::new()
            .guid(uid(20))
            .name("App")
            .configuration_type("Application")
            .library("Engine.lib")
            .library("user32.lib"),
    )?;
    fixture.write_project(
        "Engine/Engine.vcxproj",
        &ProjectXml::new()
            .guid(uid(21))
            .name("Engine")
            .configuration_type("StaticLibrary"),
    )?;
    fixture.write_solution(
        "Native.sln",
        &[
            ("App", "App\\App.vcxproj", uid(20)),
            ("Engine", "Engine\\Engine.vcxproj", uid(21)),
        ],
    )
}

fn merge_pair(fixture: &TempDirFixture) -> Written {
    let primary = fixture.write_project(
        "primary/Game/Game.vcxproj",
        &ProjectXml::new()
            .guid(uid(30))
            .name("Game")
            .library("Shared.lib"),
    )?;
    fixture.write_project(
        "secondary/Shared/Shared.vcxproj",
        &ProjectXml::new()
            .guid(uid(31))
            .name("Shared")
            .reference("..\\Math\\Math.vcxproj", Some(uid(32)))
            .reference("..\\Io\\Io.vcxproj", Some(uid(33))),
    )?;
    fixture.write_project("secondary/Math/Math.vcxproj", &ProjectXml::new().guid(uid(32)).name("Math"))?;
    fixture.write_project("secondary/Io/Io.vcxproj", &ProjectXml::new().guid(uid(33)).name("Io"))?;
    fixture.write_project(
        "secondary/Tools/Tools.vcxproj",
        &ProjectXml::new()
            .guid(uid(34))
            .name("Tools")
            .reference("..\\Shared\\Shared.vcxproj", Some(uid(31))),
    )?;
    fixture.write_solution(
        "secondary/Engine.sln",
        &[
            ("Shared", "Shared\\Shared.vcxproj", uid(31)),
            ("Tools", "Tools\\Tools.vcxproj", uid(34)),
        ],
    )?;
    Ok(primary)
}

//! Headless demo: plays one encounter in the terminal.

use battle_view::{
    Actor, Battle, BattleData, BattleViewConfig, CursorMove, ElementType, GameStatus, LangRegistry,
    Localizer, MoveSlot, Phase, RandomResolver, Resolver, ScriptedResolver, Team, TextFrame,
    TurnAction, TurnData, TurnHandshake, Unit, ViewResult,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "battle-view", about = "Play a battle encounter headlessly")]
struct Args {
    /// View configuration (RON). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// String catalogs (RON). The bundled catalogs are used when omitted.
    #[arg(long)]
    strings: Option<PathBuf>,

    #[arg(long, default_value = "en")]
    lang: String,

    /// Recorded action script (JSON) to replay instead of rolling rounds.
    #[arg(long)]
    script: Option<PathBuf>,

    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Gives up after this many frames.
    #[arg(long, default_value_t = 5_000)]
    max_frames: u32,
}

fn demo_teams() -> (Team, Team) {
    let player = Team::new(
        "Red",
        vec![
            Unit::new("Sparky", "Voltmouse", 12, 34).with_moves(vec![
                MoveSlot::new("Thunder Shock", ElementType::Electric, 30),
                MoveSlot::new("Quick Attack", ElementType::Normal, 30),
                MoveSlot::new("Tail Whip", ElementType::Normal, 30),
            ]),
            Unit::new("Pebble", "Rockling", 11, 40)
                .with_moves(vec![MoveSlot::new("Rock Throw", ElementType::Rock, 15)]),
        ],
    );
    let rival = Team::new(
        "Blue",
        vec![Unit::new("Leafy", "Sproutling", 12, 36).with_moves(vec![
            MoveSlot::new("Vine Whip", ElementType::Grass, 25),
            MoveSlot::new("Tackle", ElementType::Normal, 35),
        ])],
    );
    (player, rival)
}

fn run(args: Args) -> ViewResult<()> {
    let config = match &args.config {
        Some(path) => BattleViewConfig::load(path)?,
        None => BattleViewConfig::default(),
    };
    let localizer = match &args.strings {
        Some(path) => Localizer::load(path, &args.lang)?,
        None => Localizer::bundled(&args.lang)?,
    };
    let mut resolver: Box<dyn Resolver> = match &args.script {
        Some(path) => Box::new(ScriptedResolver::load(path)?),
        None => Box::new(RandomResolver::new(args.seed)),
    };
    let mut rng = StdRng::seed_from_u64(args.seed);

    let (player, rival) = demo_teams();
    let mut data = BattleData::new(&player, &rival, "Rival Blue", "route 1");
    let registry = LangRegistry::new();
    let mut battle = Battle::new(
        &mut data,
        config,
        Rc::new(RefCell::new(localizer)),
        &registry,
    );

    let mut frame = TextFrame::new();
    let mut queue: VecDeque<TurnAction> = VecDeque::new();
    let mut handshake = TurnHandshake::default();
    let (mut atk, mut def) = (TurnData::default(), TurnData::default());
    let mut atk_first = true;
    let mut last_drawn = String::new();

    for frame_number in 0..args.max_frames {
        let status = battle.step(&mut frame, &atk, &def, &mut queue, &mut handshake, atk_first);

        let drawn = frame.render();
        if drawn != last_drawn {
            println!("--- frame {} ---\n{}", frame_number, drawn);
            last_drawn = drawn;
        }

        match status {
            GameStatus::Ended(outcome) => {
                println!("Encounter over: {:?}", outcome);
                return Ok(());
            }
            GameStatus::Continue(Phase::Selection) if !handshake.is_activated() => {
                if !battle.is_attack_choice() {
                    // Action menu: go for "Attack".
                    while battle.cur_pos() != 0 {
                        battle.move_cur(CursorMove::Next);
                    }
                    battle.toggle_attack_choice();
                    continue;
                }

                let known = battle
                    .engine()
                    .data()
                    .active_unit(Actor::Attacker)
                    .map(|unit| unit.moves.iter().flatten().count())
                    .unwrap_or(0)
                    .max(1);
                let target = rng.random_range(0..known);
                while battle.cur_pos() != target {
                    battle.move_cur(CursorMove::Next);
                }
                let choice = TurnData::attack(battle.cur_pos());
                battle.toggle_attack_choice();

                let Some(round) = resolver.resolve(battle.engine().data(), choice) else {
                    println!("No more rounds to play.");
                    return Ok(());
                };
                atk = round.atk;
                def = round.def;
                atk_first = round.atk_first;
                queue.extend(round.actions);
                handshake.activate();
            }
            GameStatus::Continue(_) => {
                if battle.dialog().is_some() {
                    battle.pass_dialog();
                }
            }
        }
    }

    tracing::warn!(max_frames = args.max_frames, "frame budget exhausted");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("battle_view=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

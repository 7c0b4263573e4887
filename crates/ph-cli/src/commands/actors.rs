use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ph_core::{ActorId, ActorProfile, FullName};
use ph_engine::contract;

use super::{Context, parse_rank};

pub struct HireArgs {
    pub last: String,
    pub first: String,
    pub patronymic: Option<String>,
    pub rank: String,
    pub awards: u32,
    pub experience: u32,
}

pub struct EditArgs {
    pub last: Option<String>,
    pub first: Option<String>,
    pub patronymic: Option<String>,
    pub rank: Option<String>,
    pub awards: Option<u32>,
    pub experience: Option<u32>,
}

pub fn list(ctx: &Context) -> Result<(), String> {
    let director = ctx.open()?;
    let actors = director.actors();

    if actors.is_empty() {
        println!("  No actors on the roster.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Rank", "Experience", "Awards", "Contract"]);

    for actor in &actors {
        table.add_row(vec![
            actor.id.to_string(),
            actor.name.to_string(),
            actor.rank.to_string(),
            actor.experience.to_string(),
            actor.awards_count.to_string(),
            contract::quote(actor).total.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} actors", actors.len());

    Ok(())
}

pub fn quote(ctx: &Context, actor: u32) -> Result<(), String> {
    let director = ctx.open()?;
    let id = ActorId(actor);
    let q = director
        .preview_contract_cost(id)
        .map_err(|e| e.to_string())?;
    let name = director
        .playhouse()
        .actor(id)
        .map(|a| a.name.to_string())
        .unwrap_or_default();

    println!("  {} {name}", "Quote for".bold());
    println!("  Contract {}", q.contract);
    println!("  Premium  {}", q.premium);
    println!("  Total    {}", q.total);

    Ok(())
}

pub fn hire(ctx: &Context, args: HireArgs) -> Result<(), String> {
    let rank = parse_rank(&args.rank)?;
    let mut name = FullName::new(args.last, args.first);
    if let Some(p) = args.patronymic {
        name = name.with_patronymic(p);
    }
    let profile = ActorProfile::new(name)
        .with_rank(rank)
        .with_awards(args.awards)
        .with_experience(args.experience);

    let id = ctx.update(|d| d.add_actor(profile).map_err(|e| e.to_string()))?;
    println!("Hired actor #{id}");
    Ok(())
}

pub fn edit(ctx: &Context, actor: u32, args: EditArgs) -> Result<(), String> {
    let id = ActorId(actor);
    let rank = args.rank.as_deref().map(parse_rank).transpose()?;

    ctx.update(|d| {
        let mut profile = d
            .playhouse()
            .require_actor(id)
            .map_err(|e| e.to_string())?
            .profile();
        if let Some(last) = args.last {
            profile.name.last = last;
        }
        if let Some(first) = args.first {
            profile.name.first = first;
        }
        if let Some(p) = args.patronymic {
            profile.name.patronymic = Some(p);
        }
        if let Some(rank) = rank {
            profile.rank = rank;
        }
        if let Some(awards) = args.awards {
            profile.awards_count = awards;
        }
        if let Some(experience) = args.experience {
            profile.experience = experience;
        }
        d.update_actor(id, profile).map_err(|e| e.to_string())
    })?;

    println!("Updated actor #{id}");
    Ok(())
}

pub fn fire(ctx: &Context, actor: u32) -> Result<(), String> {
    let gone = ctx.update(|d| d.delete_actor(ActorId(actor)).map_err(|e| e.to_string()))?;
    println!("Dismissed #{} {}", gone.id, gone.name);
    Ok(())
}

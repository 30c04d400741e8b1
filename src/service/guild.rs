//! Intersection and permission filtering of guild lists.

use std::collections::HashSet;

use serenity::all::{GuildId, Permissions};

use crate::model::discord::UserGuild;

/// Filters the caller's guilds down to the ones they can manage and the bot
/// is installed in.
///
/// A guild survives iff its id is in `bot_guild_ids` and the caller's
/// permission bitmask has MANAGE_GUILD set. Runs in O(|caller| + |bot|) via
/// the pre-built id set and preserves the input order; an empty result is a
/// valid outcome, not an error.
///
/// # Arguments
/// - `user_guilds` - The caller's guild memberships, in provider order
/// - `bot_guild_ids` - Ids of every guild the bot is currently in
///
/// # Returns
/// - `Vec<UserGuild>` - The manageable mutual guilds, in input order
pub fn filter_manageable_guilds(
    user_guilds: Vec<UserGuild>,
    bot_guild_ids: &HashSet<GuildId>,
) -> Vec<UserGuild> {
    user_guilds
        .into_iter()
        .filter(|guild| {
            bot_guild_ids.contains(&guild.id)
                && guild.permissions.contains(Permissions::MANAGE_GUILD)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn guild(id: u64, permissions: Permissions) -> UserGuild {
        serde_json::from_value(serde_json::json!({
            "id": id.to_string(),
            "name": format!("Guild {}", id),
            "icon": null,
            "owner": false,
            "permissions": permissions.bits().to_string(),
            "features": [],
        }))
        .unwrap()
    }

    fn ids(ids: &[u64]) -> HashSet<GuildId> {
        ids.iter().map(|id| GuildId::new(*id)).collect()
    }

    #[test]
    fn keeps_only_mutual_guilds_with_manage_guild() {
        let user_guilds = vec![
            guild(1, Permissions::MANAGE_GUILD),
            guild(2, Permissions::MANAGE_GUILD),
            guild(3, Permissions::SEND_MESSAGES),
        ];

        let filtered = filter_manageable_guilds(user_guilds, &ids(&[1, 3, 4]));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.get(), 1);
    }

    #[test]
    fn other_permission_bits_do_not_qualify() {
        let all_but_manage = Permissions::all() & !Permissions::MANAGE_GUILD;
        let user_guilds = vec![guild(1, all_but_manage)];

        let filtered = filter_manageable_guilds(user_guilds, &ids(&[1]));

        assert!(filtered.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let user_guilds = vec![
            guild(5, Permissions::MANAGE_GUILD),
            guild(2, Permissions::MANAGE_GUILD),
            guild(9, Permissions::MANAGE_GUILD),
        ];

        let filtered = filter_manageable_guilds(user_guilds, &ids(&[2, 5, 9]));

        let order: Vec<u64> = filtered.iter().map(|g| g.id.get()).collect();
        assert_eq!(order, vec![5, 2, 9]);
    }

    #[test]
    fn empty_result_is_valid() {
        let filtered = filter_manageable_guilds(Vec::new(), &ids(&[1, 2]));
        assert!(filtered.is_empty());

        let filtered =
            filter_manageable_guilds(vec![guild(1, Permissions::MANAGE_GUILD)], &HashSet::new());
        assert!(filtered.is_empty());
    }

    /// Membership property over random bitmasks and id overlaps: a guild is
    /// kept iff its id is mutual and MANAGE_GUILD is set. Also checks the
    /// filter is idempotent.
    #[test]
    fn membership_property_holds_for_random_inputs() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let user_guilds: Vec<UserGuild> = (0..rng.random_range(0..20))
                .map(|_| {
                    let id = rng.random_range(1..=30u64);
                    let permissions = Permissions::from_bits_truncate(rng.random::<u64>());
                    guild(id, permissions)
                })
                .collect();

            let bot_guild_ids: HashSet<GuildId> = (0..rng.random_range(0..20))
                .map(|_| GuildId::new(rng.random_range(1..=30u64)))
                .collect();

            let filtered = filter_manageable_guilds(user_guilds.clone(), &bot_guild_ids);

            let expected: Vec<&UserGuild> = user_guilds
                .iter()
                .filter(|g| {
                    bot_guild_ids.contains(&g.id)
                        && g.permissions.contains(Permissions::MANAGE_GUILD)
                })
                .collect();

            assert_eq!(filtered.len(), expected.len());
            for (kept, wanted) in filtered.iter().zip(expected) {
                assert_eq!(kept, wanted);
            }

            let twice = filter_manageable_guilds(filtered.clone(), &bot_guild_ids);
            assert_eq!(twice, filtered);
        }
    }
}

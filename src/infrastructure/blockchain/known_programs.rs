use solana_sdk::pubkey::Pubkey;

/// Well-known market and AMM program ids
pub const KNOWN_PROGRAMS: &[(&str, &str)] = &[
    ("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin", "Serum DEX v3"),
    ("srmqPvymJeFKQ4zGQed1GUphjmsamBwRfzUQK8Ax1mm", "OpenBook v1"),
    ("opnb2LAfJYbRMAHHvqjCwQxanZn7ReEHp1k81EohpZb", "OpenBook v2"),
    ("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8", "Raydium AMM v4"),
    ("CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C", "Raydium CPMM"),
    ("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK", "Raydium CLMM"),
];

pub fn program_name(program_id: &Pubkey) -> Option<&'static str> {
    let id = program_id.to_string();
    KNOWN_PROGRAMS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

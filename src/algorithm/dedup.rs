// Poda de registros de choque duplicados.
use std::collections::HashSet;
use log::info;
use crate::models::ClashRecord;

/// Deja un solo registro por par no ordenado {main, detail}.
///
/// Se conserva el primer registro visto para cada par, tal cual (peso y
/// metadatos incluidos). Los siguientes, también los invertidos (B,A), se
/// descartan aunque su peso sea distinto: no se suman pesos.
/// El orden relativo de los registros conservados es el de la entrada.
pub fn dedup_clashes<I>(records: I) -> Vec<ClashRecord>
where
    I: IntoIterator<Item = ClashRecord>,
{
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut kept: Vec<ClashRecord> = Vec::new();
    let mut dropped = 0usize;

    for record in records {
        let (a, b) = record.pair_key();
        let key = (a.to_string(), b.to_string());
        if seen.insert(key) {
            kept.push(record);
        } else {
            dropped += 1;
        }
    }

    info!("🧹 [dedup] {} registros conservados, {} duplicados descartados", kept.len(), dropped);
    kept
}

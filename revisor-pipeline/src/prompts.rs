//! Prompt templates for the three generation passes.
//!
//! The prompts are in Portuguese, matching the language of the corpus
//! the retrieval collections were built from.

/// Heading that separates the revised text from its change log in the
/// rewrite reply. The reviser splits on it once; the incremental editor
/// strips everything after it before prompting again.
pub const ADJUSTMENTS_HEADING: &str = "🛠️ Ajustes Técnicos e Correções";

/// Marker used as the context block when retrieval returned nothing.
pub const NO_CONTEXT_MARKER: &str =
    "Referencial teórico não retornou resultados específicos relevantes.";

/// Header of the grounding-context block.
pub const CONTEXT_HEADER: &str = "### REFERENCIAL TEÓRICO BUSCADO (RAG) ###";

/// Build the fixed taxonomy prompt for classification.
pub fn classification_prompt(text: &str) -> String {
    format!(
        r#"Analise o texto/arquivo/diretório abaixo e classifique-o em UMA das categorias:

CATEGORIAS:
1. PRODUTO: Se refere a qualquer produto/serviço para venda ou uso agrícola.
   - Nomes comerciais de produtos (ORONDIS®, POLYTRIN, Miravis Pro, Yieldon, Seeker)
   - Argumentários de vendas, apresentações técnicas de produtos
   - Folhetos comerciais, fichas técnicas promocionais
   - Exemplos do que pode surgir: "Argumentário de vendas ORONDIS®", "Apresentação Técnica Curyom"

2. CULTURA: Se foca especificamente em uma cultura agrícola ou plantação.
   - Soja, milho, arroz, trigo, café, algodão, cana, feijão
   - Culturas específicas mencionadas no título/conteúdo principal
   - Exemplos: "Manejo de soja", "Doenças do milho", "Cultivo de trigo"

3. OUTROS: Se for um documento técnico, manual, livro, artigo, guia, publicação científica.
   - Manuais técnicos, livros acadêmicos
   - Artigos científicos, publicações de pesquisa
   - Guias de boas práticas, procedimentos
   - Materiais educacionais, apresentações acadêmicas
   - Normas, regulamentos, editais
   - Exemplos: "Manual de Identificação de Plantas Daninhas", "Fisiologia vegetal",
     "Livro Manejo de Nematoides", "Manual de boas práticas"

Texto para classificar: "{text}"

REGRA IMPORTANTE:
1. Retorne APENAS: "produto", "cultura" ou "outros"
2. Responda com apenas uma palavra e em capslook: PRODUTO, CULTURA OU OUTROS."#
    )
}

/// Build the grounded-rewrite prompt.
pub fn revision_prompt(content: &str, rag_context: &str) -> String {
    format!(
        r#"Você é um **Revisor Técnico Sênior** com foco na área agrícola, rigoroso, preciso e com a missão de garantir a **veracidade científica absoluta** do texto de entrada.
Confira se os valores estão idênticos ao banco de dados.

Seu objetivo é:
1. **CORRIGIR** automaticamente qualquer imprecisão, erro técnico ou erro científico no texto original.
2. **ENRIQUECER** o texto original, substituindo termos vagos por **terminologia técnica precisa** (ex: troque 'veneno' por 'defensivo agrícola' ou 'fitossanitário').
3. **ACRESCENTAR** dados concretos, números e informações específicas, *apenas* quando o **REFERENCIAL TEÓRICO** fornecido for relevante para enriquecer ou corrigir o tópico do texto original.
4. **MANTER** a estrutura e o tamanho do texto original (máximo delta de 5%).
5. **PROIBIDO** adicionar informações que tangenciem ou desviem do tema central do texto original.

---
### TEXTO ORIGINAL A SER REVISADO ###
{content}

---
{rag_context}
---

## ESTRUTURA DE RETORNO OBRIGATÓRIA:

Retorne o **TEXTO COMPLETAMENTE REVISADO E CORRIGIDO** primeiro.

Após, coloque quais dados foram buscados no banco de dados para essa correção.

Em seguida, adicione uma subseção chamada "{heading}" listando de forma concisa cada alteração significativa feita (correção ou enriquecimento) e qual fonte foi usada."#,
        heading = ADJUSTMENTS_HEADING,
    )
}

/// Build the incremental-edit prompt.
///
/// `main_text` must already have its change-log section stripped; the
/// prompt forbids the model from reintroducing metadata sections.
pub fn incremental_prompt(main_text: &str, instruction: &str) -> String {
    format!(
        r#"Você é um **Editor Sênior** com a única missão de aplicar uma mudança incremental de forma fluida.

Seu objetivo principal é editar o TEXTO PRINCIPAL A SER AJUSTADO:
1. **APENAS** edite o texto para incorporar as informações da INSTRUÇÃO INCREMENTAL de forma natural, **mantendo o tom técnico**.
2. Não é para mencionar a instrução incremental na saída.
3. **PROIBIDO** manter ou incluir as seções de metadados ("{heading}", "Dados Buscados", etc.) na sua resposta.

---
### TEXTO PRINCIPAL A SER AJUSTADO ###
{main_text}

---
### INSTRUÇÃO INCREMENTAL A SER ACRESCENTADA ###
{instruction}

---

Retorne **SOMENTE O TEXTO FINAL RESULTANTE**, completamente editado e pronto."#,
        heading = ADJUSTMENTS_HEADING,
    )
}
